pub mod json_list;
pub mod time;
