use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        event::bus::EventBus,
        model::{
            auth::AuthSession,
            user::{CreateUserParam, UpdateUserParam},
        },
        query::{list_query::ListQuery, predicate::{compile, Predicate}},
        service::{
            auth::password::hash_password, cache::EntityCache, change::ChangeNotifier,
            scope::station_scoped,
        },
    },
};

const COLLECTION: &str = "users";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a EntityCache,
    events: &'a EventBus,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a EntityCache, events: &'a EventBus) -> Self {
        Self { db, cache, events }
    }

    fn notifier(&self) -> ChangeNotifier<'_> {
        ChangeNotifier::new(self.cache, self.events, COLLECTION)
    }

    /// Lists users across every station.
    pub async fn list(&self, query: &ListQuery) -> Result<ListDto<UserDto>, AppError> {
        let predicate = compile(query.filter.as_deref())?;
        self.list_where(predicate, query).await
    }

    /// Lists the users of the caller's own station.
    pub async fn list_for_station(
        &self,
        query: &ListQuery,
        session: &AuthSession,
    ) -> Result<ListDto<UserDto>, AppError> {
        let predicate = station_scoped(query, session)?;
        self.list_where(predicate, query).await
    }

    async fn list_where(
        &self,
        predicate: Predicate<entity::user::Entity>,
        query: &ListQuery,
    ) -> Result<ListDto<UserDto>, AppError> {
        let repo = UserRepository::new(self.db);

        let total = repo.count(&predicate).await?;
        let listing = repo.list(predicate, query).await?;

        Ok(ListDto::new(
            listing.into_dto(|user| user.into_dto()),
            query.paginator(total).into_dto(),
        ))
    }

    /// Gets a user by id, serving from cache when possible.
    pub async fn get(&self, id: &str) -> Result<Option<UserDto>, AppError> {
        if let Some(cached) = self.cache.get::<UserDto>(COLLECTION, id).await {
            return Ok(Some(cached));
        }

        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = user.into_dto();
        self.cache.put(COLLECTION, id, &dto).await;

        Ok(Some(dto))
    }

    /// Creates a user on behalf of `creator`.
    ///
    /// Station admins cannot create super admins, and users they create
    /// without a station are assigned to the admin's own station.
    pub async fn create(
        &self,
        mut dto: CreateUserDto,
        creator: &AuthSession,
    ) -> Result<UserDto, AppError> {
        if creator.role == Role::StationAdmin {
            if dto.role == Role::SuperAdmin {
                return Err(AuthError::InvalidPermissions {
                    user_id: creator.user_id.clone(),
                    role: creator.role,
                }
                .into());
            }
            if dto.station_id.is_none() {
                dto.station_id = creator.station_id.clone();
            }
        }

        let password_hash = hash_password(&dto.password)?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParam::from_dto(dto, password_hash))
            .await?;

        let dto = user.into_dto();
        self.notifier().created(&dto.id, dto.station_id.clone(), &dto);

        Ok(dto)
    }

    /// Applies a partial update. A new password is hashed before storing.
    pub async fn update(&self, id: &str, dto: UpdateUserDto) -> Result<Option<UserDto>, AppError> {
        let password_hash = dto.password.as_deref().map(hash_password).transpose()?;

        let Some(user) = UserRepository::new(self.db)
            .update(id, UpdateUserParam::from_dto(dto, password_hash))
            .await?
        else {
            return Ok(None);
        };

        let dto = user.into_dto();
        self.notifier()
            .updated(&dto.id, dto.station_id.clone(), &dto)
            .await;

        Ok(Some(dto))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        let deleted = repo.delete(id).await?;
        if deleted {
            self.notifier().deleted(id, user.station_id).await;
        }

        Ok(deleted)
    }
}
