mod fridge_item;
