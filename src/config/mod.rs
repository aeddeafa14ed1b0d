pub mod merger_config;
