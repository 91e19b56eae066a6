pub mod product_dto;

pub use product_dto::{
    CategoryInProductDto, CreateUpdateProductDto, ListProductsQuery, ProductResponseDto,
};
