pub mod server;

/// Actions
#[derive(Debug)]
pub enum Action {
    Server { port: u16 },
}
