use ormlet::{err, Error, Model};
use pretty_assertions::assert_eq;
use tests::{setup, setup_logged};

use ormlet_core::driver::Transaction;

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct User {
    #[key]
    #[column("Name")]
    name: String,

    #[column("Age")]
    age: i64,
}

fn tom() -> User {
    User {
        name: "Tom".to_string(),
        age: 18,
    }
}

#[tokio::test]
async fn error_rolls_back() {
    let (db, log) = setup_logged().await;

    let err = db
        .transaction(|s| {
            Box::pin(async move {
                s.model::<User>()?.create_table().await?;
                s.insert(&mut [tom()]).await?;
                Err::<(), Error>(err!("boom"))
            })
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "boom");

    let mut s = db.session();
    assert!(!s.model::<User>().unwrap().has_table().await.unwrap());

    assert_eq!(
        log.transactions(),
        [Transaction::Start, Transaction::Rollback]
    );
}

#[tokio::test]
async fn ok_commits() {
    let (db, log) = setup_logged().await;

    let inserted = db
        .transaction(|s| {
            Box::pin(async move {
                s.model::<User>()?.create_table().await?;
                s.insert(&mut [tom()]).await
            })
        })
        .await
        .unwrap();
    assert_eq!(inserted, 1);

    let mut s = db.session();
    let mut users: Vec<User> = vec![];
    s.model::<User>().unwrap().find(&mut users).await.unwrap();
    assert_eq!(users, [tom()]);

    assert_eq!(log.transactions(), [Transaction::Start, Transaction::Commit]);
}

#[tokio::test]
async fn panic_rolls_back_and_resumes() {
    let db = setup().await;

    let inner = db.clone();
    let res = tokio::spawn(async move {
        inner
            .transaction(|s| {
                Box::pin(async move {
                    s.model::<User>()?.create_table().await?;
                    if s.has_table().await? {
                        panic!("boom");
                    }
                    Ok::<_, Error>(())
                })
            })
            .await
    })
    .await;

    let panic = res.unwrap_err();
    assert!(panic.is_panic());

    // The connection was released and the table is gone
    let mut s = db.session();
    assert!(!s.model::<User>().unwrap().has_table().await.unwrap());
}

#[tokio::test]
async fn manual_control() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();

    s.begin().await.unwrap();
    s.insert(&mut [tom()]).await.unwrap();
    s.rollback().await.unwrap();
    assert_eq!(s.count().await.unwrap(), 0);

    s.begin().await.unwrap();
    s.insert(&mut [tom()]).await.unwrap();
    s.commit().await.unwrap();
    assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn dropped_session_rolls_back() {
    let db = setup().await;
    db.session()
        .model::<User>()
        .unwrap()
        .create_table()
        .await
        .unwrap();

    {
        let mut s = db.session();
        s.model::<User>().unwrap();
        s.begin().await.unwrap();
        s.insert(&mut [tom()]).await.unwrap();
    }

    // Waits for the connection to be released by the rollback task
    let mut s = db.session();
    assert_eq!(s.model::<User>().unwrap().count().await.unwrap(), 0);
}
