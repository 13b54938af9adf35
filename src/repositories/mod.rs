mod api_buyer_repository;
mod traits;

pub use api_buyer_repository::ApiBuyerRepository;
pub use traits::BuyerRepository;
