pub mod get_vegetarian_users;
