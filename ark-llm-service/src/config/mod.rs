pub mod ark_config;
