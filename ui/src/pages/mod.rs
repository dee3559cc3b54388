pub mod landing;
pub mod portal;
pub mod suite;
