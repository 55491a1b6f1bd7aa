pub mod header;
pub mod toaster;
pub mod upload_area;
pub mod upload_image;
