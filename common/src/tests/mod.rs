mod redacted_text;
