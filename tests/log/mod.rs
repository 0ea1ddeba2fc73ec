mod show_log_from_head;
