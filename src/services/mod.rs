mod address_book_service;

pub use address_book_service::AddressBookService;
