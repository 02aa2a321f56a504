mod reminders_derive_job;

pub(crate) use reminders_derive_job::RemindersDeriveJob;
