// Bridge pattern: remotes (abstractions) and TVs (implementations) vary
// independently, connected only through the Tv trait.

pub trait Tv {
    fn on(&self) -> String;
    fn off(&self) -> String;
    fn set_channel(&self, channel: u32) -> String;
}

pub struct SonyTv;

impl Tv for SonyTv {
    fn on(&self) -> String {
        "Sony TV is ON".to_string()
    }

    fn off(&self) -> String {
        "Sony TV is OFF".to_string()
    }

    fn set_channel(&self, channel: u32) -> String {
        format!("Sony TV set to channel {channel}")
    }
}

pub struct SamsungTv;

impl Tv for SamsungTv {
    fn on(&self) -> String {
        "Samsung TV is ON".to_string()
    }

    fn off(&self) -> String {
        "Samsung TV is OFF".to_string()
    }

    fn set_channel(&self, channel: u32) -> String {
        format!("Samsung TV set to channel {channel}")
    }
}

pub struct RemoteControl {
    tv: Box<dyn Tv>,
}

impl RemoteControl {
    pub fn new(tv: Box<dyn Tv>) -> Self {
        Self { tv }
    }

    pub fn turn_on(&self) -> String {
        self.tv.on()
    }

    pub fn turn_off(&self) -> String {
        self.tv.off()
    }

    pub fn set_channel(&self, channel: u32) -> String {
        self.tv.set_channel(channel)
    }
}

/// Refined abstraction: extends the remote without touching any TV.
pub struct AdvancedRemoteControl {
    remote: RemoteControl,
}

impl AdvancedRemoteControl {
    pub fn new(tv: Box<dyn Tv>) -> Self {
        Self {
            remote: RemoteControl::new(tv),
        }
    }

    pub fn turn_on(&self) -> String {
        self.remote.turn_on()
    }

    pub fn turn_off(&self) -> String {
        self.remote.turn_off()
    }

    pub fn set_favorite_channel(&self) -> Vec<String> {
        vec![
            "Setting to favorite channel: 10".to_string(),
            self.remote.set_channel(10),
        ]
    }
}

fn main() {
    let basic_remote = RemoteControl::new(Box::new(SonyTv));
    println!("{}", basic_remote.turn_on());
    println!("{}", basic_remote.set_channel(5));
    println!("{}", basic_remote.turn_off());

    let advanced_remote = AdvancedRemoteControl::new(Box::new(SamsungTv));
    println!("{}", advanced_remote.turn_on());
    for line in advanced_remote.set_favorite_channel() {
        println!("{line}");
    }
    println!("{}", advanced_remote.turn_off());
}
