#[cfg(test)]
pub mod test {
    use crate::kind::Value;
    use crate::record::{Fields, Record};

    #[derive(Debug, Default, PartialEq)]
    pub struct Fruit {
        pub apple: String,
        pub orange: String,
        pub banana: i64,
        pub apple_sauce: i64,
        pub apple_sauce_s: i64,
        pub straw_berry: String,
    }

    impl Record for Fruit {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .string("Apple", "One", "Description of Apple", &mut self.apple)
                .string("Orange", "Second", "Description of Orange", &mut self.orange)
                .int("Banana", "33", "Description of Banana", &mut self.banana)
                .int("AppleSauce", "0", "Description of AppleSauce", &mut self.apple_sauce)
                .int("AppleSauceS", "0", "Description of AppleSauceS", &mut self.apple_sauce_s)
                .string("StrawBerry", "Apples", "Description of StrawBerry", &mut self.straw_berry)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Defaults {
        pub default_one: String,
        pub default_two: String,
        pub default_three: i64,
        pub default_four: i64,
        pub default_five: i64,
    }

    impl Record for Defaults {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .string("DefaultOne", "One", "Description of DefaultOne", &mut self.default_one)
                .string("DefaultTwo", "Second", "Description of DefaultTwo", &mut self.default_two)
                .int("DefaultThree", "0", "Description of DefaultThree", &mut self.default_three)
                .int("DefaultFour", "1", "Description of DefaultFour", &mut self.default_four)
                .int("DefaultFive", "2", "Description of DefaultFive", &mut self.default_five)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Bools {
        pub bool_one: bool,
        pub bool_two: bool,
        pub bool_three: bool,
        pub bool_four: bool,
    }

    impl Record for Bools {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .bool("BoolOne", "true", "Description of BoolOne", &mut self.bool_one)
                .bool("BoolTwo", "false", "Description of BoolTwo", &mut self.bool_two)
                .bool("BoolThree", "true", "Description of BoolThree", &mut self.bool_three)
                .bool("BoolFour", "false", "Description of BoolFour", &mut self.bool_four)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Floats {
        pub float_one: f64,
        pub float_two: f64,
        pub float_three: f64,
        pub float_four: f64,
    }

    impl Record for Floats {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .float("FloatOne", "1.1", "", &mut self.float_one)
                .float("FloatTwo", "1.2", "", &mut self.float_two)
                .float("FloatThree", "0.1", "", &mut self.float_three)
                .float("FloatFour", "0.001", "", &mut self.float_four)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Mixed {
        pub init_one: f64,
        pub init_two: String,
        pub init_three: bool,
        pub init_four: i64,
    }

    impl Record for Mixed {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .float("InitOne", "1.1", "", &mut self.init_one)
                .string("InitTwo", "Test", "", &mut self.init_two)
                .bool("InitThree", "true", "", &mut self.init_three)
                .int("InitFour", "5", "", &mut self.init_four)
        }
    }

    pub struct Empty;

    impl Record for Empty {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
        }
    }

    /// A string field followed by a field of a kind that cannot be loaded.
    #[derive(Debug, PartialEq)]
    pub struct Unsupported {
        pub name: String,
        pub hosts: Value,
    }

    impl Default for Unsupported {
        fn default() -> Self {
            Self {
                name: String::new(),
                hosts: Value::String(String::new()),
            }
        }
    }

    impl Record for Unsupported {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .string("Name", "default", "", &mut self.name)
                .dynamic("Hosts", "[]string", "", "", &mut self.hosts)
        }
    }

    /// Two identifiers that derive the same flag and env names.
    #[derive(Debug, Default, PartialEq)]
    pub struct Colliding {
        pub db_host_upper: String,
        pub db_host_lower: String,
    }

    impl Record for Colliding {
        fn fields(&mut self) -> Fields<'_> {
            Fields::new()
                .string("DbHost", "", "", &mut self.db_host_upper)
                .string("dbHost", "", "", &mut self.db_host_lower)
        }
    }

    #[test]
    fn fruit_declares_six_fields() {
        let mut fruit = Fruit::default();
        assert_eq!(fruit.fields().len(), 6);
    }
}
