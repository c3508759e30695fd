mod common;

mod conditions;
mod grades;
