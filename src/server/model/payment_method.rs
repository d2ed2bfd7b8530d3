use chrono::{DateTime, Utc};

use crate::model::payment_method::{
    CreatePaymentMethodDto, PaymentMethodDto, UpdatePaymentMethodDto,
};

/// Accepted way of paying, keyed by its SAT payment-form code.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
    /// Whether the method can currently be used at the register.
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PaymentMethod {
    pub fn into_dto(self) -> PaymentMethodDto {
        PaymentMethodDto {
            id: self.id,
            key: self.key,
            name: self.name,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::payment_method::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentMethodParam {
    pub key: String,
    pub name: String,
    pub description: String,
    pub status: bool,
}

impl CreatePaymentMethodParam {
    pub fn from_dto(dto: CreatePaymentMethodDto) -> Self {
        Self {
            key: dto.key,
            name: dto.name,
            description: dto.description,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentMethodParam {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

impl UpdatePaymentMethodParam {
    pub fn from_dto(dto: UpdatePaymentMethodDto) -> Self {
        Self {
            key: dto.key,
            name: dto.name,
            description: dto.description,
            status: dto.status,
        }
    }
}
