mod round_properties;
