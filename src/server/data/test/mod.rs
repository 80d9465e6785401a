mod stadium;
