mod mock_buyer_repository;

pub use mock_buyer_repository::MockBuyerRepository;
