use ormlet::Model;
use pretty_assertions::assert_eq;
use tests::setup_logged;

#[derive(Debug, Default, Model)]
struct User {
    #[key]
    #[column("Name")]
    name: String,

    #[column("Age")]
    age: i64,
}

#[derive(Debug, Default, Model)]
#[table = "people"]
struct Person {
    #[key]
    id: i64,

    #[constraint("NOT NULL")]
    email: String,

    #[skip]
    cached: Option<String>,
}

#[tokio::test]
async fn create_has_drop() {
    let (db, log) = setup_logged().await;
    let mut s = db.session();

    s.model::<User>().unwrap();
    assert!(!s.has_table().await.unwrap());

    s.create_table().await.unwrap();
    assert!(s.has_table().await.unwrap());

    s.drop_table().await.unwrap();
    assert!(!s.has_table().await.unwrap());

    let sql: Vec<_> = log.statements().into_iter().map(|(sql, _)| sql).collect();
    assert_eq!(
        sql,
        [
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "CREATE TABLE User (Name text PRIMARY KEY,Age bigint)",
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "DROP TABLE IF EXISTS User",
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
        ]
    );
}

#[tokio::test]
async fn table_name_and_constraints() {
    let (db, log) = setup_logged().await;
    let mut s = db.session();

    let table = s.model::<Person>().unwrap().ref_table().unwrap();
    assert_eq!(table.name, "people");
    assert_eq!(table.field_names, ["id", "email"]);

    s.create_table().await.unwrap();

    let (sql, _) = log.statements().pop().unwrap();
    assert_eq!(sql, "CREATE TABLE people (id bigint PRIMARY KEY,email text NOT NULL)");
}

#[tokio::test]
async fn switching_models() {
    let (db, _log) = setup_logged().await;
    let mut s = db.session();

    s.model::<User>().unwrap().create_table().await.unwrap();
    s.model::<Person>().unwrap().create_table().await.unwrap();

    assert!(s.model::<User>().unwrap().has_table().await.unwrap());
    assert!(s.model::<Person>().unwrap().has_table().await.unwrap());

    s.model::<User>().unwrap().drop_table().await.unwrap();
    assert!(!s.has_table().await.unwrap());
    assert!(s.model::<Person>().unwrap().has_table().await.unwrap());
}

#[tokio::test]
async fn sessions_share_the_database() {
    let (db, _log) = setup_logged().await;

    db.session()
        .model::<User>()
        .unwrap()
        .create_table()
        .await
        .unwrap();

    let mut other = db.session();
    assert!(other.model::<User>().unwrap().has_table().await.unwrap());
}
