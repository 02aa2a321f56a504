mod api_ext;
mod due_date;
