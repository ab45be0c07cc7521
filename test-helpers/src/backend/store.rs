//! In-memory tables behind the stand-in backend.

use jiff::Timestamp;
use payloads::{Resource, UserId, requests, responses};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already registered")]
    EmailTaken,
    #[error("{0} {1} not found")]
    NotFound(&'static str, i64),
    /// A write referring to a record that doesn't exist.
    #[error("{1} {2} does not exist")]
    UnknownReference(&'static str, &'static str, i64),
    #[error("Stored record is malformed")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Default)]
pub struct Store {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    tokens: HashMap<String, UserId>,
    records: HashMap<&'static str, Table>,
}

struct Account {
    user: responses::User,
    password: String,
}

/// Rows of one resource, kept in wire form.
#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Value>,
}

impl Store {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn create_account(
        &self,
        details: &requests::NewAccount,
    ) -> Result<responses::Session, StoreError> {
        let mut tables = self.lock();
        if tables.accounts.iter().any(|a| a.user.email == details.email) {
            return Err(StoreError::EmailTaken);
        }
        let now = Timestamp::now();
        let user = responses::User {
            id: UserId(tables.accounts.len() as i64 + 1),
            full_name: details.full_name.clone(),
            email: details.email.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.accounts.push(Account {
            user: user.clone(),
            password: details.password.clone(),
        });
        Ok(tables.issue_session(user))
    }

    pub fn sign_in(
        &self,
        credentials: &requests::Credentials,
    ) -> Result<responses::Session, StoreError> {
        let mut tables = self.lock();
        let user = tables
            .accounts
            .iter()
            .find(|a| {
                a.user.email == credentials.email
                    && a.password == credentials.password
            })
            .map(|a| a.user.clone())
            .ok_or(StoreError::InvalidCredentials)?;
        Ok(tables.issue_session(user))
    }

    pub fn user_for_token(&self, token: &str) -> Option<UserId> {
        self.lock().tokens.get(token).copied()
    }

    /// Invalidate every issued token, as a backend restart or expiry would.
    pub fn revoke_all_tokens(&self) {
        self.lock().tokens.clear();
    }

    pub fn list<R: Resource>(&self) -> Result<Vec<R>, StoreError> {
        let tables = self.lock();
        let Some(table) = tables.records.get(R::PATH) else {
            return Ok(Vec::new());
        };
        table
            .rows
            .values()
            .map(|row| {
                serde_json::from_value(tables.expand(R::PATH, row))
                    .map_err(StoreError::from)
            })
            .collect()
    }

    pub fn get<R: Resource>(&self, id: i64) -> Result<R, StoreError> {
        let tables = self.lock();
        let row = tables
            .records
            .get(R::PATH)
            .and_then(|table| table.rows.get(&id))
            .ok_or(StoreError::NotFound(R::NAME, id))?;
        Ok(serde_json::from_value(tables.expand(R::PATH, row))?)
    }

    pub fn insert<R: Resource>(
        &self,
        draft: &R::Draft,
    ) -> Result<R, StoreError> {
        let mut row = serde_json::to_value(draft)?;
        let mut tables = self.lock();
        tables.check_references(&row)?;
        let id = tables.records.get(R::PATH).map_or(0, |t| t.last_id) + 1;
        if let Value::Object(fields) = &mut row {
            fields.insert("id".into(), id.into());
        }
        let record: R =
            serde_json::from_value(tables.expand(R::PATH, &row))?;
        let table = tables.records.entry(R::PATH).or_default();
        table.last_id = id;
        table.rows.insert(id, row);
        Ok(record)
    }

    pub fn update<R: Resource>(
        &self,
        id: i64,
        patch: &R::Patch,
    ) -> Result<R, StoreError> {
        let changes = serde_json::to_value(patch)?;
        let mut tables = self.lock();
        tables.check_references(&changes)?;
        let mut updated = tables
            .records
            .get(R::PATH)
            .and_then(|table| table.rows.get(&id))
            .cloned()
            .ok_or(StoreError::NotFound(R::NAME, id))?;
        if let (Value::Object(fields), Value::Object(changes)) =
            (&mut updated, changes)
        {
            for (field, value) in changes {
                if field != "id" {
                    fields.insert(field, value);
                }
            }
        }
        let record: R =
            serde_json::from_value(tables.expand(R::PATH, &updated))?;
        if let Some(table) = tables.records.get_mut(R::PATH) {
            table.rows.insert(id, updated);
        }
        Ok(record)
    }

    pub fn delete<R: Resource>(&self, id: i64) -> Result<R, StoreError> {
        let mut tables = self.lock();
        let row = tables
            .records
            .get_mut(R::PATH)
            .and_then(|table| table.rows.remove(&id))
            .ok_or(StoreError::NotFound(R::NAME, id))?;
        Ok(serde_json::from_value(tables.expand(R::PATH, &row))?)
    }
}

impl Tables {
    fn issue_session(&mut self, user: responses::User) -> responses::Session {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), user.id);
        responses::Session { token, user }
    }

    /// Candidate ids named by a campaign row or patch. Absent when the row
    /// doesn't carry the field.
    fn candidate_ids(row: &Value) -> Option<Vec<i64>> {
        let ids = row.get(CANDIDATE_IDS)?.as_array()?;
        Some(ids.iter().filter_map(Value::as_i64).collect())
    }

    fn check_references(&self, row: &Value) -> Result<(), StoreError> {
        let candidates = self.records.get(CANDIDATES);
        for id in Self::candidate_ids(row).unwrap_or_default() {
            if !candidates.is_some_and(|table| table.rows.contains_key(&id)) {
                return Err(StoreError::UnknownReference(
                    CANDIDATE_IDS,
                    <responses::Candidate as Resource>::NAME,
                    id,
                ));
            }
        }
        Ok(())
    }

    /// Wire form of a stored row. Campaign rows get their candidates
    /// resolved; candidates deleted since are skipped.
    fn expand(&self, path: &str, row: &Value) -> Value {
        let mut row = row.clone();
        if path != CAMPAIGNS {
            return row;
        }
        let candidates: Vec<Value> = Self::candidate_ids(&row)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| self.records.get(CANDIDATES)?.rows.get(&id))
            .cloned()
            .collect();
        if let Value::Object(fields) = &mut row {
            fields.insert("candidates".into(), Value::Array(candidates));
        }
        row
    }
}

const CAMPAIGNS: &str = <responses::Campaign as Resource>::PATH;
const CANDIDATES: &str = <responses::Candidate as Resource>::PATH;
const CANDIDATE_IDS: &str = "candidate_ids";
