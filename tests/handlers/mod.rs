mod health;
mod search;
