use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthSession,
    query::{
        collection::Collection,
        list_query::ListQuery,
        predicate::{compile, Predicate},
    },
};

/// Compiles the client filter and ANDs a `StationId` clause for the caller's
/// station onto it.
///
/// # Returns
/// - `Err(AuthError::StationNotAssigned)` - The caller has no station
/// - `Err(AppError::QueryErr)` - The client filter does not compile
pub fn station_scoped<E: Collection>(
    query: &ListQuery,
    session: &AuthSession,
) -> Result<Predicate<E>, AppError> {
    let Some(station_id) = session.station_id.as_deref() else {
        return Err(AuthError::StationNotAssigned(session.user_id.clone()).into());
    };

    let predicate = compile::<E>(query.filter.as_deref())?;

    Ok(predicate.and(Predicate::eq("StationId", station_id)?))
}
