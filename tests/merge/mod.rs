mod merge_branches;
