mod factory;
mod filesystem;
mod memory;
mod traits;

pub use factory::{create_repository, BackendConfig};
pub use filesystem::FilesystemRepository;
pub use memory::InMemoryRepository;
pub use traits::AddressBookRepository;
