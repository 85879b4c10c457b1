mod test_message_broadcast;
mod test_message_without_room;
