use ormlet::{params, Assignments, Model, Value};
use pretty_assertions::assert_eq;
use tests::{setup, setup_logged};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct User {
    #[key]
    #[column("Name")]
    name: String,

    #[column("Age")]
    age: i64,
}

fn user(name: &str, age: i64) -> User {
    User {
        name: name.to_string(),
        age,
    }
}

#[tokio::test]
async fn insert_and_find() {
    let (db, log) = setup_logged().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();
    log.clear();

    let affected = s
        .insert(&mut [user("Tom", 18), user("Sam", 25)])
        .await
        .unwrap();
    assert_eq!(affected, 2);

    let mut users: Vec<User> = vec![];
    s.filter("Age > ?", params![10i64])
        .order_by("Age DESC")
        .limit(5)
        .find(&mut users)
        .await
        .unwrap();
    assert_eq!(users, [user("Sam", 25), user("Tom", 18)]);

    assert_eq!(
        log.statements(),
        [
            (
                "INSERT INTO User (Name,Age) VALUES (?, ?), (?, ?)".to_string(),
                params!["Tom", 18i64, "Sam", 25i64],
            ),
            (
                "SELECT Name,Age FROM User WHERE Age > ? ORDER BY Age DESC LIMIT ?".to_string(),
                params![10i64, 5u64],
            ),
        ]
    );
}

#[tokio::test]
async fn find_everything() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();
    s.insert(&mut [user("Tom", 18), user("Sam", 25), user("Ann", 31)])
        .await
        .unwrap();

    let mut users: Vec<User> = vec![];
    s.order_by("Name").find(&mut users).await.unwrap();

    assert_eq!(users, [user("Ann", 31), user("Sam", 25), user("Tom", 18)]);
}

#[tokio::test]
async fn first_and_not_found() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();
    s.insert(&mut [user("Tom", 18)]).await.unwrap();

    let mut found = User::default();
    s.filter("Name = ?", params!["Tom"])
        .first(&mut found)
        .await
        .unwrap();
    assert_eq!(found, user("Tom", 18));

    let err = s
        .filter("Name = ?", params!["Jack"])
        .first(&mut found)
        .await
        .unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(found, user("Tom", 18));
}

#[tokio::test]
async fn update_in_given_order() {
    let (db, log) = setup_logged().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();
    s.insert(&mut [user("Tom", 18)]).await.unwrap();
    log.clear();

    let affected = s
        .filter("Name = ?", params!["Tom"])
        .update(Assignments::from_flat(params!["Age", 30i64, "Name", "Tim"]).unwrap())
        .await
        .unwrap();
    assert_eq!(affected, 1);

    assert_eq!(
        log.statements(),
        [(
            "UPDATE User SET Age = ?, Name = ? WHERE Name = ?".to_string(),
            params![30i64, "Tim", "Tom"],
        )]
    );

    let mut users = vec![];
    s.find::<User>(&mut users).await.unwrap();
    assert_eq!(users, [user("Tim", 30)]);
}

#[tokio::test]
async fn flat_assignments_need_pairs() {
    let err = Assignments::from_flat(params!["Age", 30i64, "Name"]).unwrap_err();
    assert_eq!(err.to_string(), "no value for column `Name`");

    let err = Assignments::from_flat(vec![Value::I64(1), Value::I64(2)]).unwrap_err();
    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn delete_and_count() {
    let (db, log) = setup_logged().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();
    s.insert(&mut [user("Tom", 18), user("Sam", 25), user("Ann", 31)])
        .await
        .unwrap();
    log.clear();

    assert_eq!(s.filter("Age < ?", params![30i64]).count().await.unwrap(), 2);

    let deleted = s
        .filter("Name = ?", params!["Tom"])
        .delete()
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    assert_eq!(s.count().await.unwrap(), 2);

    assert_eq!(
        log.statements(),
        [
            (
                "SELECT count(*) FROM User WHERE Age < ?".to_string(),
                params![30i64],
            ),
            ("DELETE FROM User WHERE Name = ?".to_string(), params!["Tom"]),
            ("SELECT count(*) FROM User".to_string(), params![]),
        ]
    );
}

#[tokio::test]
async fn duplicate_key_fails_the_insert() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<User>().unwrap().create_table().await.unwrap();

    let err = s
        .insert(&mut [user("Tom", 18), user("Tom", 19)])
        .await
        .unwrap_err();
    assert!(err.is_driver_operation_failed());

    // The statement is atomic
    assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn raw_statements() {
    let db = setup().await;
    let mut s = db.session();

    s.raw("CREATE TABLE User (Name text PRIMARY KEY, Age bigint)", [])
        .exec()
        .await
        .unwrap();

    let affected = s
        .raw("INSERT INTO User (Name, Age) VALUES (?, ?), (?, ?)", params!["Tom", 18i64, "Sam", 25i64])
        .exec()
        .await
        .unwrap();
    assert_eq!(affected, 2);

    let row = s
        .raw("SELECT Name, Age FROM User", [])
        .raw("WHERE Name = ?", params!["Tom"])
        .query_row()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row[0], Value::from("Tom"));
    assert_eq!(row[1], Value::I64(18));

    let none = s
        .raw("SELECT Name FROM User WHERE Age > ?", params![100i64])
        .query_row()
        .await
        .unwrap();
    assert!(none.is_none());
}
