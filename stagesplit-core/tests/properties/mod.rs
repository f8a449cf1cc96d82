mod config_tests;
mod split_bounds_tests;
mod stage_tests;
