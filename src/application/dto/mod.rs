pub mod reviews;
pub mod stores;
pub mod users;

pub use reviews::ReviewDto;
pub use stores::{
    LocationDto, StoreDto, StorePageDto, StoreWithReviewsDto, TagBrowseDto, TagCountDto,
    TopStoreDto,
};
pub use users::UserDto;
