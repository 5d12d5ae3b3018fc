//! Unit of Work: repository access plus transaction lifecycle.
//!
//! Reads go through the pooled repositories. Writes that touch both the user
//! and the employee record run inside `transaction`, which commits when the
//! closure returns `Ok` and rolls back otherwise.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::repository::entities::employee::{self, Entity as EmployeeEntity};
use crate::repository::entities::user::{self, Entity as UserEntity};
use crate::repository::{
    write_error, EmployeeRepository, EmployeeStore, UserRepository, UserStore,
};
use common::{AppError, AppResult};
use domain::{Employee, ProfileChanges, User, UserChanges};

/// Boxed future returned by transaction closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not object safe because `transaction` is generic; services take it as a
/// type parameter.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    /// Execute a closure within a transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// User writes within this transaction
    pub fn users(&self) -> TxUserRepository<'a> {
        TxUserRepository { txn: self.txn }
    }

    /// Employee writes within this transaction
    pub fn employees(&self) -> TxEmployeeRepository<'a> {
        TxEmployeeRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    employee_repo: Arc<EmployeeStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let employee_repo = Arc::new(EmployeeStore::new(db.clone()));
        Self {
            db,
            user_repo,
            employee_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let result = f(TransactionContext::new(&txn)).await;

        match result {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound user writes.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Insert a user with an already hashed password
    pub async fn create(
        &self,
        username: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            first_name: Set(first_name),
            last_name: Set(last_name),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    /// Apply the supplied identity fields
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: user::ActiveModel = user.into();

        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }

        let model = active.update(self.txn).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    /// Delete a user row (its employee row goes with it)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Transaction-bound employee writes.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxEmployeeRepository<'a> {
    /// Insert the employee row for `user`
    pub async fn create(
        &self,
        user: User,
        id_number: String,
        position: String,
        department: String,
    ) -> AppResult<Employee> {
        let active_model = employee::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            id_number: Set(id_number),
            position: Set(position),
            department: Set(department),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await.map_err(write_error)?;
        Ok(model.into_domain(user))
    }

    /// Apply the supplied employment fields; `user` is the already updated owner
    pub async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
        user: User,
    ) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: employee::ActiveModel = employee.into();

        if let Some(id_number) = changes.id_number {
            active.id_number = Set(id_number);
        }
        if let Some(position) = changes.position {
            active.position = Set(position);
        }
        if let Some(department) = changes.department {
            active.department = Set(department);
        }

        let model = active.update(self.txn).await.map_err(write_error)?;
        Ok(model.into_domain(user))
    }

    /// Delete an employee row
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Run `$body` inside `$uow.transaction`, binding the context to `$ctx`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
