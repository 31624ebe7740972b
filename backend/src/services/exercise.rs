//! Exercise logging service
//!
//! Provides business logic for exercise tracking:
//! - Logging an exercise against an existing user
//! - Building a user's log filtered by date range and limit
//!
//! Input is coerced rather than rejected: a non-numeric duration is stored
//! as "not a number" and an unparseable date is stored as `Invalid Date`.

use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseRepository, Store, UserRepository};
use chrono::{DateTime, Utc};
use exercise_log_shared::calendar::{self, calendar_or_invalid};
use exercise_log_shared::coercion::{present, LooseField};
use exercise_log_shared::models::{ExerciseRecord, User};
use exercise_log_shared::parse_int;
use exercise_log_shared::types::ExerciseLogQuery;
use exercise_log_shared::validation::{validate_exercise_fields, USER_NOT_FOUND};
use tracing::{debug, info, warn};

/// Counter of exercises logged since startup
pub const EXERCISES_LOGGED_METRIC: &str = "exercise_log_exercises_logged_total";
/// Counter of log queries served
pub const LOG_QUERIES_METRIC: &str = "exercise_log_log_queries_total";

/// Input for logging an exercise
#[derive(Debug, Clone, Default)]
pub struct LogExerciseInput {
    pub description: Option<LooseField>,
    pub duration: Option<LooseField>,
    pub date: Option<LooseField>,
}

/// A bound of the log date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    At(DateTime<Utc>),
    /// The client sent a bound that is not a date; nothing satisfies it
    Unparseable,
}

impl DateBound {
    /// Parse a bound from query text
    pub fn parse(input: &str) -> Self {
        calendar::parse_date(input).map_or(DateBound::Unparseable, DateBound::At)
    }

    fn allows_after(&self, date: Option<DateTime<Utc>>) -> bool {
        matches!((self, date), (DateBound::At(bound), Some(d)) if d >= *bound)
    }

    fn allows_before(&self, date: Option<DateTime<Utc>>) -> bool {
        matches!((self, date), (DateBound::At(bound), Some(d)) if d <= *bound)
    }
}

/// Parsed log filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub from: Option<DateBound>,
    pub to: Option<DateBound>,
    /// Zero or NaN limits are dropped while parsing
    pub limit: Option<i64>,
}

impl From<&ExerciseLogQuery> for LogFilter {
    fn from(query: &ExerciseLogQuery) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        Self {
            from: non_empty(&query.from).map(|v| DateBound::parse(&v)),
            to: non_empty(&query.to).map(|v| DateBound::parse(&v)),
            limit: non_empty(&query.limit)
                .and_then(|v| parse_int(&v))
                .filter(|n| *n != 0),
        }
    }
}

/// A user's filtered exercise log
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<ExerciseRecord>,
}

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise for the user with `user_id`
    pub async fn log_exercise(
        store: &Store,
        user_id: &str,
        input: LogExerciseInput,
    ) -> Result<ExerciseRecord, ApiError> {
        // An unknown user is reported ahead of missing fields
        Self::find_user(store, user_id).await?;

        validate_exercise_fields(input.description.as_ref(), input.duration.as_ref()).map_err(
            |msg| {
                warn!(user_id = %user_id, "Rejected exercise without description or duration");
                ApiError::Validation(msg)
            },
        )?;

        let description = input
            .description
            .as_ref()
            .map(LooseField::as_text)
            .unwrap_or_default();
        let duration = input.duration.as_ref().and_then(LooseField::to_int);
        let date = match present(input.date.as_ref()) {
            Some(field) => calendar_or_invalid(Self::date_from_field(field)),
            None => calendar::today(),
        };

        let record = ExerciseRepository::create(
            store,
            user_id,
            CreateExercise {
                description,
                duration,
                date,
            },
        )
        .await
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

        metrics::counter!(EXERCISES_LOGGED_METRIC).increment(1);
        info!(
            user_id = %record.user_id,
            duration = ?record.duration,
            date = %record.date,
            "Exercise logged"
        );

        Ok(record)
    }

    /// Get a user's exercises, filtered by date range and then limited
    pub async fn get_log(
        store: &Store,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<ExerciseLog, ApiError> {
        let user = Self::find_user(store, user_id).await?;

        let entries = ExerciseRepository::list_for_user(store, &user.id).await;
        let total = entries.len();
        let entries = Self::apply_limit(Self::filter_by_date(entries, filter), filter.limit);

        metrics::counter!(LOG_QUERIES_METRIC).increment(1);
        debug!(
            user_id = %user.id,
            total,
            returned = entries.len(),
            ?filter,
            "Exercise log queried"
        );

        Ok(ExerciseLog { user, entries })
    }

    async fn find_user(store: &Store, user_id: &str) -> Result<User, ApiError> {
        UserRepository::find_by_id(store, user_id)
            .await
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Interpret a supplied date field; numbers are epoch milliseconds
    fn date_from_field(field: &LooseField) -> Option<DateTime<Utc>> {
        match field {
            LooseField::Text(text) => calendar::parse_date(text),
            LooseField::Number(millis) => calendar::from_epoch_millis(*millis),
            LooseField::Bool(flag) => calendar::from_epoch_millis(f64::from(u8::from(*flag))),
        }
    }

    /// Keep records inside the date range; stored dates are re-parsed
    pub fn filter_by_date(entries: Vec<ExerciseRecord>, filter: &LogFilter) -> Vec<ExerciseRecord> {
        if filter.from.is_none() && filter.to.is_none() {
            return entries;
        }

        entries
            .into_iter()
            .filter(|entry| {
                let date = calendar::parse_date(&entry.date);
                filter.from.map_or(true, |bound| bound.allows_after(date))
                    && filter.to.map_or(true, |bound| bound.allows_before(date))
            })
            .collect()
    }

    /// Take a prefix of the entries.
    ///
    /// A positive limit keeps the first `limit` entries; a negative limit
    /// drops that many entries from the end.
    pub fn apply_limit<T>(mut entries: Vec<T>, limit: Option<i64>) -> Vec<T> {
        let keep = match limit {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            Some(n) if n < 0 => {
                let drop = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
                entries.len().saturating_sub(drop)
            }
            _ => return entries,
        };
        entries.truncate(keep);
        entries
    }
}
