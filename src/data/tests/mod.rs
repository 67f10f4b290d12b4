mod sample_file;
