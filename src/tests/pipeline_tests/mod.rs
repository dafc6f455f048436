mod merge_tests;
mod parse_tests;
