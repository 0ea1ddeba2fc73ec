mod commit_staged_files;
