mod predicate;
