//! Repository layer: one struct per table group.

pub mod category_repo;
pub mod city_repo;
pub mod enquiry_repo;
pub mod gallery_repo;
pub mod other_service_repo;
pub mod sub_category_repo;
pub mod vehicle_repo;

pub use category_repo::CategoryRepo;
pub use city_repo::CityRepo;
pub use enquiry_repo::EnquiryRepo;
pub use gallery_repo::GalleryRepo;
pub use other_service_repo::OtherServiceRepo;
pub use sub_category_repo::SubCategoryRepo;
pub use vehicle_repo::VehicleRepo;
