pub mod navigation_command;
