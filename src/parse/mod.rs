pub mod input;

pub use input::{
    Action, InputError, combine_date_time, parse_action, parse_body_line, parse_date, parse_field,
    parse_priority, parse_task_number, parse_time,
};
