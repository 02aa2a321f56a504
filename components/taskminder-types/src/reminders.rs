mod reminder;

pub use self::reminder::Reminder;
