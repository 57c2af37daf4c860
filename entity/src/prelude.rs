pub use super::fridge_item::Entity as FridgeItem;
