mod category_dto;

pub use category_dto::{CategoryInput, CategoryRequestDto, CategoryResponseDto};
