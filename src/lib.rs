pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod calendarerror;
    pub mod date;
    pub mod dateformat;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod italiancalendar;
        pub mod simplecalendar;
        pub mod holidaycalendarmanager;
    }
}
