use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        data::product::ProductRepository,
        error::AppError,
        event::bus::EventBus,
        model::product::{CreateProductParam, UpdateProductParam},
        query::list_query::ListQuery,
        service::{cache::EntityCache, change::ChangeNotifier},
    },
};

const COLLECTION: &str = "products";

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a EntityCache,
    events: &'a EventBus,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a EntityCache, events: &'a EventBus) -> Self {
        Self { db, cache, events }
    }

    fn notifier(&self) -> ChangeNotifier<'_> {
        ChangeNotifier::new(self.cache, self.events, COLLECTION)
    }

    /// Lists one page of products with its paginator.
    pub async fn list(&self, query: &ListQuery) -> Result<ListDto<ProductDto>, AppError> {
        let repo = ProductRepository::new(self.db);

        let total = repo.count(query).await?;
        let listing = repo.list(query).await?;

        Ok(ListDto::new(
            listing.into_dto(|product| product.into_dto()),
            query.paginator(total).into_dto(),
        ))
    }

    /// Gets a product by id, serving from cache when possible.
    pub async fn get(&self, id: &str) -> Result<Option<ProductDto>, AppError> {
        if let Some(cached) = self.cache.get::<ProductDto>(COLLECTION, id).await {
            return Ok(Some(cached));
        }

        let Some(product) = ProductRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = product.into_dto();
        self.cache.put(COLLECTION, id, &dto).await;

        Ok(Some(dto))
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductDto, AppError> {
        let product = ProductRepository::new(self.db)
            .create(CreateProductParam::from_dto(dto))
            .await?;

        let dto = product.into_dto();
        self.notifier().created(&dto.id, None, &dto);

        Ok(dto)
    }

    pub async fn update(
        &self,
        id: &str,
        dto: UpdateProductDto,
    ) -> Result<Option<ProductDto>, AppError> {
        let Some(product) = ProductRepository::new(self.db)
            .update(id, UpdateProductParam::from_dto(dto))
            .await?
        else {
            return Ok(None);
        };

        let dto = product.into_dto();
        self.notifier().updated(&dto.id, None, &dto).await;

        Ok(Some(dto))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = ProductRepository::new(self.db).delete(id).await?;

        if deleted {
            self.notifier().deleted(id, None).await;
        }

        Ok(deleted)
    }
}
