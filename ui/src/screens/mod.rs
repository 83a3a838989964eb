// This file makes the screen modules available to the rest of the application.

pub mod user_detail;
pub mod user_list;
