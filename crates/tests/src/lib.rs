
#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod visibility_tests;

#[cfg(test)]
mod expansion_tests;

#[cfg(test)]
mod policy_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod session_race_tests;
