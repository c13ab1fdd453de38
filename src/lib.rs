pub mod backend;
pub mod io_struct;
pub mod proxy_state;
pub mod server;
