use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        payment_method::{CreatePaymentMethodDto, PaymentMethodDto, UpdatePaymentMethodDto},
    },
    server::{
        data::payment_method::PaymentMethodRepository,
        error::AppError,
        event::bus::EventBus,
        model::payment_method::{CreatePaymentMethodParam, UpdatePaymentMethodParam},
        query::list_query::ListQuery,
        service::{cache::EntityCache, change::ChangeNotifier},
    },
};

const COLLECTION: &str = "payments";

pub struct PaymentMethodService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a EntityCache,
    events: &'a EventBus,
}

impl<'a> PaymentMethodService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a EntityCache, events: &'a EventBus) -> Self {
        Self { db, cache, events }
    }

    fn notifier(&self) -> ChangeNotifier<'_> {
        ChangeNotifier::new(self.cache, self.events, COLLECTION)
    }

    /// Lists one page of payment methods with its paginator.
    pub async fn list(&self, query: &ListQuery) -> Result<ListDto<PaymentMethodDto>, AppError> {
        let repo = PaymentMethodRepository::new(self.db);

        let total = repo.count(query).await?;
        let listing = repo.list(query).await?;

        Ok(ListDto::new(
            listing.into_dto(|payment_method| payment_method.into_dto()),
            query.paginator(total).into_dto(),
        ))
    }

    /// Gets a payment method by id, serving from cache when possible.
    pub async fn get(&self, id: &str) -> Result<Option<PaymentMethodDto>, AppError> {
        if let Some(cached) = self.cache.get::<PaymentMethodDto>(COLLECTION, id).await {
            return Ok(Some(cached));
        }

        let Some(payment_method) = PaymentMethodRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = payment_method.into_dto();
        self.cache.put(COLLECTION, id, &dto).await;

        Ok(Some(dto))
    }

    pub async fn create(&self, dto: CreatePaymentMethodDto) -> Result<PaymentMethodDto, AppError> {
        let payment_method = PaymentMethodRepository::new(self.db)
            .create(CreatePaymentMethodParam::from_dto(dto))
            .await?;

        let dto = payment_method.into_dto();
        self.notifier().created(&dto.id, None, &dto);

        Ok(dto)
    }

    pub async fn update(
        &self,
        id: &str,
        dto: UpdatePaymentMethodDto,
    ) -> Result<Option<PaymentMethodDto>, AppError> {
        let Some(payment_method) = PaymentMethodRepository::new(self.db)
            .update(id, UpdatePaymentMethodParam::from_dto(dto))
            .await?
        else {
            return Ok(None);
        };

        let dto = payment_method.into_dto();
        self.notifier().updated(&dto.id, None, &dto).await;

        Ok(Some(dto))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = PaymentMethodRepository::new(self.db).delete(id).await?;

        if deleted {
            self.notifier().deleted(id, None).await;
        }

        Ok(deleted)
    }
}
