pub mod menu_file;
