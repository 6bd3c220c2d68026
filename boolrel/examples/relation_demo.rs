//! Walk through the relation operations on a small user x item dataset

use boolrel::{
    InMemoryRatings, MatrixOperations, MemoryModel, RatingEvent, RatingStore, SparseRelation,
};
use tracing_subscriber::EnvFilter;

fn main() -> boolrel::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ratings: InMemoryRatings = vec![
        RatingEvent::new(0, 2, 4.0),
        RatingEvent::new(0, 5, 3.0),
        RatingEvent::new(1, 2, 5.0),
        RatingEvent::new(3, 0, 2.0),
    ]
    .into();
    let mut model = MemoryModel::new(ratings);

    let mut user_items = model.ratings().user_item_relation();
    let (rows, cols) = (user_items.row_count(), user_items.column_count());
    println!("user x item relation: {rows} x {cols}, {} entries", user_items.entry_count());

    for (user, items) in user_items.non_empty_rows() {
        println!("  user {user}: {} items", items.len());
    }

    let item_users = user_items.transpose();
    println!("item 2 rated by users {:?}", item_users.get_row(2));

    let other: SparseRelation = [(0, 2), (1, 1)].into_iter().collect();
    println!("overlap with probe relation: {}", user_items.overlap(&other));

    user_items.remove_columns(&[2]);
    println!(
        "after dropping item 2: user 0 -> {:?}, {} columns",
        user_items.get_row(0),
        user_items.column_count()
    );

    model.add_user(7);
    model.update_rating(0, 5, 4.5)?;
    println!(
        "can predict (7, 5): {}, ratings stored: {}",
        model.can_predict(7, 5),
        model.ratings().len()
    );

    if let Err(err) = model.remove_rating(7, 5) {
        println!("expected failure: {err}");
    }
    Ok(())
}
