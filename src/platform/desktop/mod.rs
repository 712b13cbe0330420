pub mod data_dir;
