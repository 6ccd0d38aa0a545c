pub mod configuration;

pub mod effect {
    pub mod parameter;
    pub mod holidayeffect;
    pub mod singledayeffect;
    pub mod rangeeffect;
    pub mod anyholidayeffect;
    pub mod holidayeffectmanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod remainder;
}

pub mod model {
    pub mod holidayeffects;
    pub mod weightfit;
}

pub mod objectwithuuid;

pub mod time {
    pub mod timeencoding;
    pub mod rangeofdates;
}
