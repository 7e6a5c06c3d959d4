mod property_fold;
