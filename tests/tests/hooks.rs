use ormlet::{async_trait, err, params, Hooks, Model, Result, Session};
use std::sync::atomic::{AtomicUsize, Ordering};
use pretty_assertions::assert_eq;
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Model)]
#[hooks]
struct Account {
    #[key]
    #[column("ID")]
    id: i64,

    #[column("Password")]
    password: String,
}

#[async_trait]
impl Hooks for Account {
    async fn before_insert(&mut self, _session: &mut Session) -> Result<()> {
        self.id += 1000;
        Ok(())
    }

    async fn after_query(&mut self, _session: &mut Session) -> Result<()> {
        self.password = "******".to_string();
        Ok(())
    }
}

fn account(id: i64, password: &str) -> Account {
    Account {
        id,
        password: password.to_string(),
    }
}

#[tokio::test]
async fn hooks_rewrite_records() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<Account>().unwrap().create_table().await.unwrap();

    let mut accounts = [account(1, "123456"), account(2, "qwerty")];
    s.insert(&mut accounts).await.unwrap();

    // before_insert ran on the caller's records
    assert_eq!(accounts, [account(1001, "123456"), account(1002, "qwerty")]);

    let mut found = Account::default();
    s.first(&mut found).await.unwrap();
    assert_eq!(found, account(1001, "******"));

    // The stored password is untouched
    let row = s
        .raw("SELECT Password FROM Account WHERE ID = ?", params![1002i64])
        .query_row()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row[0], ormlet::Value::from("qwerty"));
}

static UPDATES: AtomicUsize = AtomicUsize::new(0);
static DELETES: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Default, Model)]
#[hooks]
struct Counted {
    #[key]
    id: i64,
}

#[async_trait]
impl Hooks for Counted {
    async fn before_update(&mut self, _session: &mut Session) -> Result<()> {
        UPDATES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn after_update(&mut self, _session: &mut Session) -> Result<()> {
        UPDATES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn before_delete(&mut self, _session: &mut Session) -> Result<()> {
        DELETES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn after_delete(&mut self, _session: &mut Session) -> Result<()> {
        DELETES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn before_count(&mut self, _session: &mut Session) -> Result<()> {
        Err(err!("counting is frowned upon"))
    }
}

#[tokio::test]
async fn model_level_hooks() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<Counted>().unwrap().create_table().await.unwrap();
    s.insert(&mut [Counted { id: 1 }, Counted { id: 2 }])
        .await
        .unwrap();

    s.filter("id = ?", params![1i64])
        .update([("id", 3i64)])
        .await
        .unwrap();
    assert_eq!(UPDATES.load(Ordering::SeqCst), 2);

    s.filter("id = ?", params![2i64]).delete().await.unwrap();
    assert_eq!(DELETES.load(Ordering::SeqCst), 2);

    // A failing hook is logged, the operation still runs
    assert_eq!(s.count().await.unwrap(), 1);
}

#[derive(Debug, Default, Model)]
#[hooks]
struct Audited {
    #[key]
    id: i64,
}

#[async_trait]
impl Hooks for Audited {
    async fn after_insert(&mut self, session: &mut Session) -> Result<()> {
        session
            .raw("INSERT INTO audit (record) VALUES (?)", params![self.id])
            .exec()
            .await?;
        Ok(())
    }
}

#[tokio::test]
async fn hooks_can_use_the_session() {
    let db = setup().await;
    let mut s = db.session();
    s.raw("CREATE TABLE audit (record bigint)", [])
        .exec()
        .await
        .unwrap();
    s.model::<Audited>().unwrap().create_table().await.unwrap();

    s.insert(&mut [Audited { id: 7 }, Audited { id: 8 }])
        .await
        .unwrap();

    let rows = s
        .raw("SELECT record FROM audit ORDER BY record", [])
        .query_rows()
        .await
        .unwrap();
    let records: Vec<_> = rows.into_iter().map(|row| row[0].clone()).collect();
    assert_eq!(records, params![7i64, 8i64]);
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
#[hooks]
struct Wallet {
    #[key]
    id: i64,
    balance: i64,
}

async fn touch(session: &mut Session) -> Result<()> {
    session.raw("SELECT 1", []).query_row().await?;
    Ok(())
}

#[async_trait]
impl Hooks for Wallet {
    async fn before_query(&mut self, session: &mut Session) -> Result<()> {
        touch(session).await
    }

    async fn before_update(&mut self, session: &mut Session) -> Result<()> {
        touch(session).await
    }

    async fn before_delete(&mut self, session: &mut Session) -> Result<()> {
        touch(session).await
    }

    async fn before_count(&mut self, session: &mut Session) -> Result<()> {
        touch(session).await
    }
}

#[tokio::test]
async fn statements_in_hooks_keep_pending_clauses() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<Wallet>().unwrap().create_table().await.unwrap();
    s.insert(&mut [
        Wallet { id: 1, balance: 10 },
        Wallet { id: 2, balance: 20 },
        Wallet { id: 3, balance: 30 },
    ])
    .await
    .unwrap();

    let affected = s
        .filter("id = ?", params![1i64])
        .update([("balance", 0i64)])
        .await
        .unwrap();
    assert_eq!(affected, 1);

    assert_eq!(
        s.filter("balance = ?", params![0i64]).count().await.unwrap(),
        1
    );

    let mut wallets: Vec<Wallet> = vec![];
    s.order_by("id DESC").limit(1).find(&mut wallets).await.unwrap();
    assert_eq!(wallets, [Wallet { id: 3, balance: 30 }]);

    let deleted = s
        .filter("id = ?", params![2i64])
        .delete()
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(s.count().await.unwrap(), 2);
}
