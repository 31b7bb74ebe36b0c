pub mod taxi_api;
