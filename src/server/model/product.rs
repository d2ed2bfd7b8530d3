use chrono::{DateTime, Utc};

use crate::model::product::{CreateProductDto, ProductDto, UpdateProductDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Price shown to customers, taxes included.
    pub price_public: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            price_public: self.price_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            price_public: entity.price_public,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_public: f64,
}

impl CreateProductParam {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            price_public: dto.price_public,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_public: Option<f64>,
}

impl UpdateProductParam {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            price_public: dto.price_public,
        }
    }
}
