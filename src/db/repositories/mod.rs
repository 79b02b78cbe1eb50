mod days;
